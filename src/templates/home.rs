// src/templates/home.rs
use super::{render_page, text};
use crate::content::ContentMap;
use chrono::{DateTime, Utc};

const DONATION_FORM_URL: &str =
    "https://www.zeffy.com/embed/donation-form/one-of-the-hundred?modal=true&amount=25";
const THERMOMETER_URL: &str = "https://www.zeffy.com/embed/thermometer/one-of-the-hundred";
const HERO_IMAGE_URL: &str =
    "https://thebeayoutifulfoundation.com/wp-content/uploads/2020/10/InspiredByHer2020_POR_WEB-89.jpg";
const MAIN_SITE_URL: &str = "https://thebeayoutifulfoundation.com/";

pub fn render(content: &ContentMap, campaign_end: &DateTime<Utc>) -> String {
    let body = format!(
        "{}\n<main>\n{}\n{}\n{}\n{}\n</main>\n{}",
        header(),
        hero(content, campaign_end),
        tiers_section(content),
        progress_section(),
        testimonials_section(content),
        footer(content),
    );
    render_page("One of the Hundred", &body)
}

fn header() -> String {
    format!(
        r##"<header>
    <nav class="container">
        <div class="logo-container">
            <div class="logo">BF</div>
            <h3>BeaYOUtiful Foundation</h3>
        </div>
        <button class="hamburger" aria-label="Open menu" data-menu-toggle>
            <span></span><span></span><span></span>
        </button>
        <ul class="desktop-nav">
            <li><a href="{}" target="_blank" rel="noopener noreferrer">MAIN WEBSITE</a></li>
            <li><a href="#tiers">DONATE</a></li>
            <li><a href="#progress">PROGRESS</a></li>
            <li><a href="#testimonials">IMPACT</a></li>
        </ul>
    </nav>
    <ul class="mobile-menu" data-mobile-menu>
        <li><a href="{}" target="_blank" rel="noopener noreferrer">MAIN WEBSITE</a></li>
        <li><a href="#tiers">DONATE</a></li>
        <li><a href="#progress">PROGRESS</a></li>
        <li><a href="#testimonials">IMPACT</a></li>
    </ul>
</header>"##,
        MAIN_SITE_URL, MAIN_SITE_URL
    )
}

fn hero(content: &ContentMap, campaign_end: &DateTime<Utc>) -> String {
    format!(
        r#"<section class="hero-container">
    <div class="container hero">
        <div class="hero-content">
            <div class="hero-badge"><span>Empowering Youth Since 2013</span></div>
            <div class="hero-tagline"><span>Transform Lives</span></div>
            <h1 class="hero-title">{title}</h1>
            <h2 class="hero-subtitle">{subtitle}</h2>
            <div class="countdown-container">
                <h3>Campaign: Nov 2 - Dec 2, 2025</h3>
                <p>Ends on Giving Tuesday</p>
                <div class="countdown-timer" data-deadline="{deadline}">
                    <div class="countdown-item"><span class="countdown-number" data-unit="days">00</span><span class="countdown-label">Days</span></div>
                    <div class="countdown-item"><span class="countdown-number" data-unit="hours">00</span><span class="countdown-label">Hours</span></div>
                    <div class="countdown-item"><span class="countdown-number" data-unit="minutes">00</span><span class="countdown-label">Minutes</span></div>
                    <div class="countdown-item"><span class="countdown-number" data-unit="seconds">00</span><span class="countdown-label">Seconds</span></div>
                </div>
            </div>
        </div>
        <div class="hero-image-wrapper">
            <img src="{image}" width="500" height="500" class="hero-img"
                 alt="Three women from the BeaYOUtiful Foundation laughing and empowered">
        </div>
    </div>
</section>"#,
        title = text(content, "heroTitle", "Join the Hundred. Change Lives"),
        subtitle = text(
            content,
            "heroSubtext",
            "Join an exclusive circle of changemakers funding confidence and self-worth for young people who need it most."
        ),
        deadline = campaign_end.to_rfc3339(),
        image = HERO_IMAGE_URL,
    )
}

fn tiers_section(content: &ContentMap) -> String {
    let benefits: Vec<String> = (1..=7)
        .map(|i| {
            text(
                content,
                &format!("changemakerBenefit{}", i),
                CHANGEMAKER_BENEFIT_FALLBACKS[i - 1],
            )
        })
        .collect();

    format!(
        r#"<section id="tiers" class="container">
    <div class="membership-section">
        <div class="membership-header">
            <h2 class="section-title">One of the Hundred</h2>
            <p class="membership-subtitle">We're building a community of 100 committed donors who believe every young person deserves confidence, self-worth, and a safe space to grow. Pledging $25 a month, you become part of One of the Hundred, a circle of change-makers who keep our programs running all year long.</p>
        </div>
        <div class="tiers-impact-grid">
            <div class="tier-card-wrapper">
{card}
            </div>
            <aside class="impact-sidebar">
                <h3>Your Direct Impact</h3>
                <div class="impact-items">
                    {impact_items}
                </div>
                <div class="funding-summary">
                    <h4>What Your Investment Funds</h4>
                    <p>{funds}</p>
                </div>
            </aside>
        </div>
        {member_benefits}
    </div>
</section>"#,
        card = tier_card(&TierCard {
            title: "Changemaker",
            subtitle: "Maximum Impact",
            price: "$25",
            price_period: "/ month",
            impact: "Funds 2 young people's workshops",
            benefits: &benefits,
            cta_text: "Become a Changemaker - Donate Now!",
            highlight_label: Some("Top Impact"),
            donation_url: DONATION_FORM_URL,
        }),
        impact_items = impact_items(),
        funds = text(
            content,
            "investmentFunds",
            "Your $25/month directly funds program materials, workshop supplies, mentorship resources, and mental wellness tools for young people who need them most."
        ),
        member_benefits = member_benefits(),
    )
}

const CHANGEMAKER_BENEFIT_FALLBACKS: [&str; 7] = [
    "Personalized welcome kit & digital badge",
    "Featured on Impact Wall & quarterly spotlights",
    "Early access to events & volunteer opportunities",
    "Annual celebration invitation",
    "Quarterly impact reports & member updates",
    "Free digital event access",
    "Founding changemaker recognition",
];

struct TierCard<'a> {
    title: &'a str,
    subtitle: &'a str,
    price: &'a str,
    price_period: &'a str,
    impact: &'a str,
    benefits: &'a [String],
    cta_text: &'a str,
    highlight_label: Option<&'a str>,
    donation_url: &'a str,
}

fn tier_card(card: &TierCard) -> String {
    let badge = card
        .highlight_label
        .map(|label| format!(r#"<div class="popular-badge">{}</div>"#, label))
        .unwrap_or_default();

    let benefit_items: String = card
        .benefits
        .iter()
        .map(|b| format!("                    <li>{}</li>\n", b))
        .collect();

    format!(
        r#"<div class="tier-card popular">
    {badge}
    <div class="tier-header">
        <h3>{title}</h3>
        <p>{subtitle}</p>
    </div>
    <div class="tier-price">{price} <span class="price-period">{period}</span></div>
    <p class="tier-impact">{impact}</p>
    <ul class="tier-benefits">
{benefits}    </ul>
    <button class="cta-button" data-donation-url="{url}">{cta}</button>
</div>"#,
        badge = badge,
        title = card.title,
        subtitle = card.subtitle,
        price = card.price,
        period = card.price_period,
        impact = card.impact,
        benefits = benefit_items,
        url = card.donation_url,
        cta = card.cta_text,
    )
}

fn impact_items() -> String {
    let items = [
        ("Funds Confidence Workshops", "Your monthly gift provides supplies, materials, and resources for skill-building workshops."),
        ("Supports Mental Wellness", "You enable access to self-worth programming and mental health tools for vulnerable youth."),
        ("Creates Lasting Change", "You build confidence, leadership, and community connection that lasts."),
        ("Guides Positive Choices", "Mentorship sessions help participants navigate school, friendships, and online life."),
        ("Supplies Learning Tools", "Materials and journals support reflection and real habit change."),
    ];
    items
        .iter()
        .map(|(title, body)| {
            format!(
                r#"<div class="impact-item"><h4>{}</h4><p>{}</p></div>"#,
                title, body
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ")
}

fn member_benefits() -> String {
    r#"<div class="member-benefits-section">
            <div class="benefits-header">
                <h3 class="section-title">What You Receive as a Member</h3>
                <p>Join "One of the Hundred" and enjoy these exclusive benefits</p>
            </div>
            <div class="benefits-grid">
                <div class="benefit-category">
                    <h3>1. Exclusive Recognition</h3>
                    <ul>
                        <li><strong>Personalized Welcome Kit</strong> - Digital welcome newsletter with video from our team and participants</li>
                        <li><strong>Digital Badge</strong> - Branded "One of the Hundred" badge to share on social media</li>
                        <li><strong>Name Recognition</strong> - Listed on dedicated webpage and featured on annual "Wall of Impact"</li>
                    </ul>
                </div>
                <div class="benefit-category">
                    <h3>2. Inside Access &amp; Updates</h3>
                    <ul>
                        <li><strong>Quarterly Impact Reports</strong> - Stories, photos, and updates on how your gifts change lives</li>
                        <li><strong>Member-Only Updates</strong> - Behind-the-scenes videos from workshops and programs</li>
                        <li><strong>Early Event Access</strong> - Pre-sale registration for galas, events, and volunteer opportunities</li>
                        <li><strong>Free Digital Event</strong> - Access to wellness or leadership development events</li>
                    </ul>
                </div>
                <div class="benefit-category">
                    <h3>3. Special Appreciation Moments</h3>
                    <ul>
                        <li><strong>Annual Celebration Call</strong> - A virtual thank-you with mentors, participants, and staff</li>
                        <li><strong>Networking Events</strong> - Potential free networking event in Vancouver or free ticket to community gathering events</li>
                    </ul>
                </div>
            </div>
        </div>"#
        .to_string()
}

fn progress_section() -> String {
    let stats = [
        ("0", "Monthly Donors", true),
        ("0", "Monthly Revenue", true),
        ("0", "Youth Funded", true),
        ("100", "Spots Remaining", false),
    ];
    let stat_cards: String = stats
        .iter()
        .map(|(value, label, animated)| {
            let number = if *animated {
                format!(r#"<span class="stat-number" data-count-to="{}">0</span>"#, value)
            } else {
                format!(r#"<span class="stat-number">{}</span>"#, value)
            };
            format!(
                r#"<div class="stat-card">{}<div class="stat-label">{}</div></div>"#,
                number, label
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"<section id="progress" class="container">
    <div class="campaign-progress-section">
        <div class="progress-header">
            <h2 class="section-title">Campaign Progress</h2>
            <p>Join the movement and see our impact grow in real-time.</p>
        </div>
        <div class="progress-main-content">
            <div class="progress-visual-column">
                <div class="progress-circle-container">
                    <div class="progress-center">
                        <div class="progress-number">0<span class="progress-percent">%</span></div>
                        <div class="progress-label">Goal Achieved</div>
                    </div>
                </div>
                <div class="progress-summary-text">
                    <h3>0 of 100 Donors</h3>
                    <p>Thanks to our incredible community, we're well on our way to our goal. Every new member brings us closer to funding life-changing programs for youth.</p>
                </div>
            </div>
            <div class="progress-stats-column">
                {stats}
            </div>
        </div>
        <div class="thermometer-wrapper">
            <iframe title="Donation form powered by Zeffy" src="{thermometer}" allow="payment"></iframe>
        </div>
    </div>
</section>"#,
        stats = stat_cards,
        thermometer = THERMOMETER_URL,
    )
}

fn testimonials_section(content: &ContentMap) -> String {
    let cards: String = [
        ("testimonial1", "\"The confidence workshops helped me find my voice. I never thought I could speak in front of my class, but now I'm mentoring others.\"", "Alex Johnson", "Workshop Participant, Age 16", "AJ"),
        ("testimonial2", "\"Giving $25 a month is the easiest high-impact habit I have. Seeing the monthly updates makes me feel connected to the change.\"", "Sarah Martinez", "Monthly Supporter", "SM"),
        ("testimonial3", "\"The mentorship program gave me the tools to believe in myself. Now I'm applying to college with confidence I never had before.\"", "Taylor Kim", "Mentorship Graduate, Age 17", "TK"),
    ]
    .iter()
    .map(|(prefix, quote, author, role, initials)| {
        format!(
            r#"<div class="testimonial-card">
                <div class="testimonial-content"><p>{}</p></div>
                <div class="testimonial-author">
                    <div class="author-avatar">{}</div>
                    <div class="author-info">
                        <h4>{}</h4>
                        <span>{}</span>
                    </div>
                </div>
            </div>"#,
            text(content, &format!("{}Quote", prefix), quote),
            text(content, &format!("{}Initials", prefix), initials),
            text(content, &format!("{}Author", prefix), author),
            text(content, &format!("{}Role", prefix), role),
        )
    })
    .collect::<Vec<_>>()
    .join("\n            ");

    format!(
        r#"<section id="testimonials" class="container">
    <div class="testimonials-section">
        <div class="testimonials-header">
            <h2 class="section-title">VOICES OF IMPACT</h2>
            <p class="testimonials-subtitle">Hear from the young people and supporters whose lives have been transformed.</p>
        </div>
        <div class="testimonials-grid">
            {}
        </div>
    </div>
</section>"#,
        cards
    )
}

fn footer(content: &ContentMap) -> String {
    format!(
        r##"<footer class="footer">
    <div class="footer-content">
        <div class="footer-section">
            <div class="footer-logo">
                <div class="logo">BF</div>
                <h3>BeaYOUtiful Foundation</h3>
            </div>
            <p>Empowering young people to recognize their inherent value and build confidence through community, connection, and acts of kindness.</p>
        </div>
        <div class="footer-section">
            <h4>Quick Links</h4>
            <ul>
                <li><a href="#tiers">Donate</a></li>
                <li><a href="#tiers">Membership Tiers</a></li>
                <li><a href="#testimonials">Our Impact</a></li>
            </ul>
        </div>
        <div class="footer-section">
            <h4>Programs</h4>
            <ul>
                <li>{impact1}</li>
                <li>{impact2}</li>
                <li>{impact3}</li>
                <li>Community Events</li>
            </ul>
        </div>
        <div class="footer-section">
            <h4>Connect</h4>
            <ul>
                <li><a href="mailto:programs@thebeayoutifulfoundation.com">programs@thebeayoutifulfoundation.com</a></li>
                <li>Charitable Registration # 75317 9712 RR0001</li>
                <li><a href="{main_site}" target="_blank" rel="noopener noreferrer">Main Website</a></li>
            </ul>
        </div>
    </div>
    <div class="footer-bottom">
        <p>&copy; 2025 BeaYOUtiful Foundation. All rights reserved.</p>
        <div class="footer-links">
            <a href="/accessibility">Accessibility</a>
        </div>
    </div>
</footer>"##,
        impact1 = text(content, "impact1", "Confidence Workshops"),
        impact2 = text(content, "impact2", "Mentorship Programs"),
        impact3 = text(content, "impact3", "Leadership Training"),
        main_site = MAIN_SITE_URL,
    )
}
