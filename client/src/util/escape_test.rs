use super::*;

#[test]
fn escape_html_maps_all_markup_characters() {
    assert_eq!(escape_html("&"), "&amp;");
    assert_eq!(escape_html("<"), "&lt;");
    assert_eq!(escape_html(">"), "&gt;");
    assert_eq!(escape_html("\""), "&quot;");
    assert_eq!(escape_html("'"), "&#039;");
}

#[test]
fn escape_html_neutralizes_script_tag() {
    assert_eq!(
        escape_html("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
    );
}

#[test]
fn escape_html_is_identity_on_safe_text() {
    for text in ["", "Hello", "Привет, мир", "price: 100 rub. / 2 pcs", "emoji 🤖 ok"] {
        assert_eq!(escape_html(text), text);
    }
}

#[test]
fn escape_html_output_never_contains_angle_brackets() {
    for text in ["<", ">>", "a<b>c", "<<<>>>", "&lt;", "<img src=x onerror=alert(1)>"] {
        let escaped = escape_html(text);
        assert!(!escaped.contains('<'), "{escaped:?} contains <");
        assert!(!escaped.contains('>'), "{escaped:?} contains >");
    }
}

#[test]
fn escape_html_escapes_existing_entities_again() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}
