//! JSX templates for page components.
//!
//! Components nest: a form renders its children as fields and an unknown
//! component wraps its children. Each level of the tree is one more
//! [`CodeFragment::Block`], so children always land one indent step deeper
//! than their parent.

use appkod_blueprint::{Blueprint, Component, ComponentKind};
use appkod_codegen::builder::{CodeFragment, Renderable, quoted};
use appkod_core::humanize;

/// Markup for one component and, recursively, its children.
pub struct ComponentMarkup<'a> {
    component: &'a Component,
    blueprint: &'a Blueprint,
}

impl<'a> ComponentMarkup<'a> {
    pub fn new(component: &'a Component, blueprint: &'a Blueprint) -> Self {
        Self {
            component,
            blueprint,
        }
    }

    /// ` id="..."` for a component that declares an id, otherwise empty.
    fn id_attr(&self) -> String {
        match self.component.id.as_deref() {
            Some(id) if is_plain_attribute(id) => format!(" id=\"{}\"", id),
            Some(id) => format!(" id={{{}}}", quoted(id)),
            None => String::new(),
        }
    }

    fn children(&self) -> Vec<CodeFragment> {
        self.component
            .children
            .iter()
            .flat_map(|child| ComponentMarkup::new(child, self.blueprint).to_fragments())
            .collect()
    }

    /// Explicit columns, or the declared fields of the source table.
    fn columns(&self) -> Vec<&'a str> {
        let component = self.component;
        if !component.columns.is_empty() {
            return component.columns.iter().map(String::as_str).collect();
        }
        component
            .source
            .as_deref()
            .and_then(|source| self.blueprint.entity(source))
            .map(|entity| entity.fields.iter().map(|f| f.name.as_str()).collect())
            .unwrap_or_default()
    }

    fn table(&self) -> Vec<CodeFragment> {
        let columns = self.columns();
        let headers = columns
            .iter()
            .map(|col| {
                CodeFragment::line(format!(
                    "<th className=\"text-left p-4\">{}</th>",
                    humanize(col)
                ))
            })
            .collect();
        let cells = columns
            .iter()
            .map(|col| CodeFragment::line(format!("<td className=\"p-4\">{{{}}}</td>", cell(col))))
            .collect();

        let table = element(
            "<table className=\"w-full\">",
            vec![
                element("<thead>", vec![element("<tr>", headers, "</tr>")], "</thead>"),
                element(
                    "<tbody>",
                    vec![element(
                        "{data.map((row: any, idx: number) => (",
                        vec![element("<tr key={idx}>", cells, "</tr>")],
                        "))}",
                    )],
                    "</tbody>",
                ),
            ],
            "</table>",
        );

        vec![element(
            &format!("<div className=\"border rounded-lg\"{}>", self.id_attr()),
            vec![
                CodeFragment::line("{loading ? ("),
                CodeFragment::indent(vec![CodeFragment::line("<div>Loading...</div>")]),
                element(") : (", vec![table], ")}"),
            ],
            "</div>",
        )]
    }

    fn button(&self) -> Vec<CodeFragment> {
        let text = self.component.prop_str("text").unwrap_or("Button");
        vec![element(
            &format!(
                "<Button{} onClick={{() => console.log('clicked')}}>",
                self.id_attr()
            ),
            vec![CodeFragment::line(jsx_text(text))],
            "</Button>",
        )]
    }

    fn form(&self) -> Vec<CodeFragment> {
        let mut body = self.children();
        if body.is_empty() {
            body.push(CodeFragment::line("{/* TODO: Generate form fields */}"));
        }
        body.push(CodeFragment::line(
            "<Button type=\"submit\">Submit</Button>",
        ));
        vec![element(&format!("<form{}>", self.id_attr()), body, "</form>")]
    }

    fn placeholder(&self, tag: &str) -> Vec<CodeFragment> {
        tracing::debug!(component = tag, "rendering placeholder for unknown component");
        let label = jsx_text(&format!("TODO: {} component", tag));
        let open = format!("<div{}>", self.id_attr());
        if self.component.children.is_empty() {
            return vec![CodeFragment::line(format!("{}{}</div>", open, label))];
        }

        let mut body = vec![CodeFragment::line(label)];
        body.extend(self.children());
        vec![element(&open, body, "</div>")]
    }
}

impl Renderable for ComponentMarkup<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.component.kind() {
            ComponentKind::Table => self.table(),
            ComponentKind::Button => self.button(),
            ComponentKind::Form => self.form(),
            ComponentKind::Other(tag) => self.placeholder(tag),
        }
    }
}

fn element(open: &str, body: Vec<CodeFragment>, close: &str) -> CodeFragment {
    CodeFragment::block(open, body, Some(close.to_string()))
}

/// Text safe to place between JSX tags.
///
/// Line breaks collapse to single spaces and characters JSX would read as
/// markup or expressions are written as entities.
pub(crate) fn jsx_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_plain_attribute(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Property access on a row, bracketed when the column is not an identifier.
fn cell(column: &str) -> String {
    let is_identifier = column
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && column
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        format!("row.{}", column)
    } else {
        format!("row[{:?}]", column)
    }
}

#[cfg(test)]
mod tests {
    use appkod_codegen::builder::Indent;

    use super::*;

    fn render(blueprint: &Blueprint) -> String {
        let component = &blueprint.pages()[0].components[0];
        ComponentMarkup::new(component, blueprint).render(Indent::TYPESCRIPT)
    }

    fn blueprint(yaml: &str) -> Blueprint {
        Blueprint::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_table_with_columns() {
        let bp = blueprint(
            r#"
            ui:
              pages:
                - path: /customers
                  title: Customers
                  components:
                    - { type: table, columns: [name, created_at] }
            "#,
        );

        insta::assert_snapshot!(render(&bp), @r#"
        <div className="border rounded-lg">
          {loading ? (
            <div>Loading...</div>
          ) : (
            <table className="w-full">
              <thead>
                <tr>
                  <th className="text-left p-4">Name</th>
                  <th className="text-left p-4">Created At</th>
                </tr>
              </thead>
              <tbody>
                {data.map((row: any, idx: number) => (
                  <tr key={idx}>
                    <td className="p-4">{row.name}</td>
                    <td className="p-4">{row.created_at}</td>
                  </tr>
                ))}
              </tbody>
            </table>
          )}
        </div>
        "#);
    }

    #[test]
    fn test_table_columns_fall_back_to_source_fields() {
        let bp = blueprint(
            r#"
            database:
              tables:
                - name: customers
                  fields:
                    - { name: firstName, type: string }
                    - { name: email, type: email }
            ui:
              pages:
                - path: /customers
                  title: Customers
                  components:
                    - { type: table, source: customers }
            "#,
        );

        let code = render(&bp);
        assert!(code.contains("<th className=\"text-left p-4\">First Name</th>"));
        assert!(code.contains("<td className=\"p-4\">{row.firstName}</td>"));
        assert!(code.contains("<td className=\"p-4\">{row.email}</td>"));
    }

    #[test]
    fn test_button() {
        let bp = blueprint(
            "ui: { pages: [ { path: /, title: Home, components: [ { type: button, props: { text: Save } } ] } ] }",
        );
        insta::assert_snapshot!(render(&bp), @r"
        <Button onClick={() => console.log('clicked')}>
          Save
        </Button>
        ");
    }

    #[test]
    fn test_button_default_label() {
        let bp = blueprint(
            "ui: { pages: [ { path: /, title: Home, components: [ { type: button } ] } ] }",
        );
        assert!(render(&bp).contains("\n  Button\n"));
    }

    #[test]
    fn test_empty_form() {
        let bp = blueprint(
            "ui: { pages: [ { path: /, title: Home, components: [ { type: form } ] } ] }",
        );
        insta::assert_snapshot!(render(&bp), @r#"
        <form>
          {/* TODO: Generate form fields */}
          <Button type="submit">Submit</Button>
        </form>
        "#);
    }

    #[test]
    fn test_nested_children_indent() {
        let bp = blueprint(
            r#"
            ui:
              pages:
                - path: /
                  title: Home
                  components:
                    - type: form
                      children:
                        - type: card
                          children:
                            - { type: button, props: { text: Go } }
            "#,
        );
        insta::assert_snapshot!(render(&bp), @r#"
        <form>
          <div>
            TODO: card component
            <Button onClick={() => console.log('clicked')}>
              Go
            </Button>
          </div>
          <Button type="submit">Submit</Button>
        </form>
        "#);
    }

    #[test]
    fn test_unknown_component() {
        let bp = blueprint(
            "ui: { pages: [ { path: /, title: Home, components: [ { type: chart } ] } ] }",
        );
        assert_eq!(render(&bp), "<div>TODO: chart component</div>\n");
    }

    #[test]
    fn test_component_ids() {
        let bp = blueprint(
            r#"
            ui:
              pages:
                - path: /
                  title: Home
                  components:
                    - type: form
                      id: signup-form
                      children:
                        - { type: button, id: "save it", props: { text: Save } }
                        - { type: map, id: region_map }
            "#,
        );
        insta::assert_snapshot!(render(&bp), @r#"
        <form id="signup-form">
          <Button id={"save it"} onClick={() => console.log('clicked')}>
            Save
          </Button>
          <div id="region_map">TODO: map component</div>
          <Button type="submit">Submit</Button>
        </form>
        "#);

        let table = blueprint(
            "ui: { pages: [ { path: /, title: Home, components: [ { type: table, id: orders, columns: [id] } ] } ] }",
        );
        assert!(render(&table).starts_with("<div className=\"border rounded-lg\" id=\"orders\">\n"));
    }

    #[test]
    fn test_jsx_text() {
        assert_eq!(jsx_text("Add customer"), "Add customer");
        assert_eq!(jsx_text("Line one\n  line two"), "Line one line two");
        assert_eq!(jsx_text("{x} <b>"), "&#123;x&#125; &lt;b&gt;");
    }

    #[test]
    fn test_cell_access() {
        assert_eq!(cell("email"), "row.email");
        assert_eq!(cell("$id"), "row.$id");
        assert_eq!(cell("unit price"), "row[\"unit price\"]");
        assert_eq!(cell("2fa"), "row[\"2fa\"]");
    }
}
