use dioxus::prelude::*;

/// Title shown in the browser tab for every page.
pub const PAGE_TITLE: &str = "Supplement Tracker Web";
/// Description exposed to search engines and link previews.
pub const PAGE_DESCRIPTION: &str = "An app to track your supplements";

/// Document shell shared by every page.
///
/// Declares the static page metadata and renders the supplied children
/// unchanged. The `<html lang="en">` wrapper itself comes from `index.html`.
#[component]
pub fn RootLayout(children: Element) -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }

        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_children_unchanged() {
        let html = dioxus_ssr::render_element(rsx! {
            RootLayout {
                p { id: "greeting", "hello" }
            }
        });
        assert!(html.contains(r#"<p id="greeting">hello</p>"#), "got: {html}");
    }

    #[test]
    fn document_template_declares_language_and_metadata() {
        let template = include_str!("../../index.html");
        assert!(template.contains(r#"<html lang="en">"#));
        assert!(template.contains(&format!("<title>{PAGE_TITLE}</title>")));
        assert!(template.contains(PAGE_DESCRIPTION));
    }
}
