// src/templates/accessibility.rs
use super::render_page;

pub fn render() -> String {
    let content = r#"
    <main class="container legal-page">
        <h1>Accessibility Statement</h1>
        <p><strong>Last updated:</strong> August 5, 2025</p>

        <section>
            <h2>Our Commitment</h2>
            <p>
                BeaYOUtiful Foundation is committed to ensuring digital accessibility for
                people with disabilities. We are continually improving the user experience
                for everyone and applying the relevant accessibility standards.
            </p>
        </section>

        <section>
            <h2>Conformance Status</h2>
            <p>
                This website strives to conform to the Web Content Accessibility
                Guidelines (WCAG) 2.1 Level AA standards. These guidelines explain how to
                make web content more accessible for people with disabilities and more
                user-friendly for everyone.
            </p>
        </section>

        <section>
            <h2>Accessibility Features</h2>
            <ul>
                <li><strong>Keyboard Navigation:</strong> All interactive elements can be accessed using a keyboard</li>
                <li><strong>Screen Reader Compatibility:</strong> Compatible with screen readers and other assistive technologies</li>
                <li><strong>Alt Text:</strong> All images include descriptive alt text</li>
                <li><strong>Color Contrast:</strong> Sufficient color contrast ratios for readability</li>
                <li><strong>Resizable Text:</strong> Text can be resized up to 200% without loss of functionality</li>
                <li><strong>Semantic HTML:</strong> Proper heading structure and semantic markup</li>
            </ul>
        </section>

        <section>
            <h2>Known Limitations</h2>
            <p>
                Third-party content, such as the embedded donation form, may not meet our
                accessibility standards. We are actively working with our providers to
                improve accessibility across all areas of the site.
            </p>
        </section>

        <section>
            <h2>Feedback</h2>
            <p>
                We welcome feedback on the accessibility of this site. If you encounter a
                barrier, email
                <a href="mailto:programs@thebeayoutifulfoundation.com">programs@thebeayoutifulfoundation.com</a>
                and we will do our best to address it.
            </p>
        </section>

        <p><a href="/">Back to the campaign</a></p>
    </main>
    "#;

    render_page("Accessibility", content)
}
