//! The page module template.

use appkod_blueprint::{Blueprint, Page};
use appkod_codegen::builder::{CodeFragment, Renderable};
use appkod_core::words_to_pascal;

use crate::{ComponentMarkup, Import, component::jsx_text};

/// One `page.tsx` client component.
pub struct PageModule<'a> {
    page: &'a Page,
    blueprint: &'a Blueprint,
}

impl<'a> PageModule<'a> {
    pub fn new(page: &'a Page, blueprint: &'a Blueprint) -> Self {
        Self { page, blueprint }
    }

    /// `Customer list` becomes `CustomerListPage`.
    pub fn component_name(&self) -> String {
        format!("{}Page", words_to_pascal(&self.page.title))
    }

    fn imports(&self) -> Vec<CodeFragment> {
        [
            Import::new("react").named("useEffect").named("useState"),
            Import::new("@/components/ui/button").named("Button"),
            Import::new("@/components/ui/table").named("Table"),
        ]
        .iter()
        .flat_map(|import| import.to_fragments())
        .collect()
    }

    fn fetch_data(&self) -> CodeFragment {
        CodeFragment::block(
            "const fetchData = async () => {",
            vec![
                CodeFragment::line("setLoading(true);"),
                CodeFragment::block(
                    "try {",
                    vec![
                        CodeFragment::line(format!(
                            "const response = await fetch('/api{}');",
                            self.page.path
                        )),
                        CodeFragment::line("const json = await response.json();"),
                        CodeFragment::line("setData(json);"),
                    ],
                    None,
                ),
                CodeFragment::block(
                    "} catch (error) {",
                    vec![CodeFragment::line(
                        "console.error('Error fetching data:', error);",
                    )],
                    None,
                ),
                CodeFragment::block(
                    "} finally {",
                    vec![CodeFragment::line("setLoading(false);")],
                    Some("}".to_string()),
                ),
            ],
            Some("};".to_string()),
        )
    }

    fn markup(&self) -> CodeFragment {
        let mut body = vec![
            CodeFragment::line(format!(
                "<h1 className=\"text-3xl font-bold mb-6\">{}</h1>",
                jsx_text(&self.page.title)
            )),
            CodeFragment::blank(),
        ];
        if let Some(description) = &self.page.description {
            body.insert(
                1,
                CodeFragment::line(format!(
                    "<p className=\"text-muted-foreground mb-6\">{}</p>",
                    jsx_text(description)
                )),
            );
        }
        body.extend(
            self.page
                .components
                .iter()
                .flat_map(|c| ComponentMarkup::new(c, self.blueprint).to_fragments()),
        );

        CodeFragment::block(
            "return (",
            vec![CodeFragment::block(
                "<div className=\"container mx-auto p-6\">",
                body,
                Some("</div>".to_string()),
            )],
            Some(");".to_string()),
        )
    }
}

impl Renderable for PageModule<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::comment("//", "Auto-generated Next.js page from Blueprint"),
            CodeFragment::comment("//", "DO NOT EDIT - regenerate from Blueprint"),
            CodeFragment::blank(),
            CodeFragment::line("'use client';"),
            CodeFragment::blank(),
        ];
        fragments.extend(self.imports());
        fragments.push(CodeFragment::blank());

        fragments.push(CodeFragment::block(
            format!("export default function {}() {{", self.component_name()),
            vec![
                CodeFragment::line("const [data, setData] = useState([]);"),
                CodeFragment::line("const [loading, setLoading] = useState(true);"),
                CodeFragment::blank(),
                CodeFragment::block(
                    "useEffect(() => {",
                    vec![CodeFragment::line("fetchData();")],
                    Some("}, []);".to_string()),
                ),
                CodeFragment::blank(),
                self.fetch_data(),
                CodeFragment::blank(),
                self.markup(),
            ],
            Some("}".to_string()),
        ));
        fragments
    }
}
