//! Bundled sample documents for demos and tests.

/// Sample HTML input for the HTML-to-Markdown direction.
pub const SAMPLE_HTML: &str = r#"<h1>Welcome to mdconv</h1>
<p>This is a <strong>free</strong> and <em>private</em> HTML to Markdown converter.</p>

<h2>Features</h2>
<ul>
  <li>GitHub Flavored Markdown support</li>
  <li>Tables, code blocks, and task lists</li>
  <li>Local processing</li>
</ul>

<h3>Code Example</h3>
<pre><code class="language-rust">fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
</code></pre>

<blockquote>
  <p>Your data never leaves your machine. Everything is processed locally.</p>
</blockquote>"#;

/// Sample Markdown input for the Markdown-to-HTML direction.
pub const SAMPLE_MARKDOWN: &str = r#"# Welcome to mdconv

This is a **free** and *private* Markdown to HTML converter.

## Features

- GitHub Flavored Markdown support
- Tables, code blocks, and task lists
- Local processing

### Code Example

```rust
fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
```

> Your data never leaves your machine. Everything is processed locally.

## Table Example

| Feature | Supported |
|---------|-----------|
| Tables | yes |
| Task Lists | yes |
| Strikethrough | yes |

## Task List

- [x] HTML to Markdown
- [x] Markdown to HTML
- [ ] Try it yourself!
"#;
