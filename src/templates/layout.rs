// src/templates/layout.rs

pub fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Join One of the Hundred - 100 monthly donors funding confidence and self-worth for young people.">
    <title>{} - BeaYOUtiful Foundation</title>
    <link rel="stylesheet" href="/static/css/main.css">
    <script src="/static/js/main.js" defer></script>
</head>
<body>
{}
</body>
</html>"#,
        title, content
    )
}
