// SPDX-License-Identifier: GPL-3.0-only

use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::{ElementRef, Html, Node};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("the page has no element with id \"{0}\"")]
    MissingContainer(String),
}

/// The HTML document cards get appended to
pub struct HostPage {
    document: Html,
}

impl HostPage {
    pub fn parse(source: &str) -> Self {
        Self {
            document: Html::parse_document(source),
        }
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn find(&self, id: &str) -> Option<NodeId> {
        self.document
            .tree
            .nodes()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().id() == Some(id))
            .map(|element| element.id())
    }

    /// Parses `markup` and appends its nodes as the last children of the element with `container_id`
    pub fn append_fragment(&mut self, container_id: &str, markup: &str) -> Result<(), PageError> {
        let target = self
            .find(container_id)
            .ok_or_else(|| PageError::MissingContainer(container_id.to_string()))?;
        let fragment = Html::parse_fragment(markup);

        if let Some(mut container) = self.document.tree.get_mut(target) {
            for child in fragment.root_element().children() {
                graft(&mut container, child);
            }
        }

        Ok(())
    }

    pub fn to_html(&self) -> String {
        self.document.html()
    }
}

/// Deep copies `node` under `parent`
fn graft(parent: &mut NodeMut<'_, Node>, node: NodeRef<'_, Node>) {
    let mut copy = parent.append(node.value().clone());
    for child in node.children() {
        graft(&mut copy, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Selector;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Insetos</title></head>
<body>
    <h1>Tipo inseto</h1>
    <div id="container-inseto" class="grade"><p class="vazio">carregando</p></div>
</body>
</html>"#;

    fn count(page: &HostPage, selector: &str) -> usize {
        let selector = Selector::parse(selector).unwrap();
        let html = Html::parse_document(&page.to_html());
        html.select(&selector).count()
    }

    #[test]
    fn containers_are_found_by_id() {
        let page = HostPage::parse(PAGE);
        assert!(page.has_container("container-inseto"));
        assert!(!page.has_container("grid"));
        assert!(!page.has_container("grade"));
    }

    #[test]
    fn fragments_are_appended_after_existing_children() {
        let mut page = HostPage::parse(PAGE);
        page.append_fragment(
            "container-inseto",
            r#"<div class="cartao-pokemon"><h3 class="nome-pokemon">caterpie</h3></div>"#,
        )
        .unwrap();
        page.append_fragment(
            "container-inseto",
            r#"<div class="cartao-pokemon"><h3 class="nome-pokemon">weedle</h3></div>"#,
        )
        .unwrap();

        assert_eq!(count(&page, "#container-inseto > .cartao-pokemon"), 2);
        assert_eq!(count(&page, "#container-inseto > p.vazio"), 1);

        let html = Html::parse_document(&page.to_html());
        let names: Vec<String> = html
            .select(&Selector::parse("#container-inseto .nome-pokemon").unwrap())
            .map(|el| el.text().collect())
            .collect();
        assert_eq!(names, vec!["caterpie", "weedle"]);
    }

    #[test]
    fn attributes_survive_the_round_trip() {
        let mut page = HostPage::parse(PAGE);
        page.append_fragment(
            "container-inseto",
            r#"<div class="cartao-pokemon" style="border-top: 4px solid #A6B91A;"><img src="https:&#x2f;&#x2f;img.example&#x2f;10.png" alt="caterpie"></div>"#,
        )
        .unwrap();

        let html = Html::parse_document(&page.to_html());
        let img = html
            .select(&Selector::parse("#container-inseto img").unwrap())
            .next()
            .unwrap();
        assert_eq!(img.value().attr("src"), Some("https://img.example/10.png"));

        let card = html
            .select(&Selector::parse(".cartao-pokemon").unwrap())
            .next()
            .unwrap();
        assert_eq!(
            card.value().attr("style"),
            Some("border-top: 4px solid #A6B91A;")
        );
    }

    #[test]
    fn appending_to_an_unknown_container_fails() {
        let mut page = HostPage::parse(PAGE);
        let err = page.append_fragment("grid", "<div></div>").unwrap_err();
        assert!(matches!(err, PageError::MissingContainer(id) if id == "grid"));
    }
}
