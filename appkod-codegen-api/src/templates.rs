//! FastAPI handler templates, one per archetype.

use appkod_blueprint::HttpMethod;
use appkod_codegen::builder::{CodeFragment, Renderable, quoted};

use crate::Target;

const SESSION_PARAM: &str = "session: Session = Depends(get_session)";
const USER_PARAM: &str = "user: User = Depends(get_current_user)";

/// Module docstring, imports and the router instance.
pub struct RoutesHeader;

impl Renderable for RoutesHeader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        [
            "\"\"\"Auto-generated API routes from Blueprint\"\"\"",
            "# DO NOT EDIT - regenerate from Blueprint",
            "",
            "from typing import List",
            "from uuid import UUID",
            "",
            "from fastapi import APIRouter, Depends, HTTPException, Query",
            "from sqlmodel import Session, select",
            "",
            "from ..auth import User, get_current_user",
            "from ..database import get_session",
            "from ..models import *",
            "",
            "router = APIRouter()",
        ]
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                CodeFragment::blank()
            } else {
                CodeFragment::line(line)
            }
        })
        .collect()
    }
}

/// Layout shared by every handler: decorator, signature, docstring, body.
pub struct Handler {
    pub decorator: String,
    pub name: String,
    pub params: Vec<String>,
    pub doc: Option<String>,
    pub body: Vec<CodeFragment>,
}

impl Handler {
    fn new(decorator: String, name: String) -> Self {
        Self {
            decorator,
            name,
            params: Vec::new(),
            doc: None,
            body: Vec::new(),
        }
    }

    fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    fn param_if(mut self, condition: bool, param: &str) -> Self {
        if condition {
            self.params.push(param.to_string());
        }
        self
    }

    fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());
        self
    }

    fn body(mut self, lines: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(lines);
        self
    }
}

impl Renderable for Handler {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        if let Some(doc) = &self.doc {
            body.push(CodeFragment::docstring(doc));
        }
        body.extend(self.body.iter().cloned());

        vec![
            CodeFragment::line(&self.decorator),
            CodeFragment::block(
                format!("async def {}({}):", self.name, self.params.join(", ")),
                body,
                None,
            ),
        ]
    }
}

/// `@router.<verb>(path, extra...)`
fn decorator(method: &HttpMethod, path: &str, extra: &[String]) -> String {
    let mut args = vec![quoted(path)];
    args.extend(extra.iter().cloned());
    match method {
        HttpMethod::Other(verb) => {
            args.push(format!("methods=[{}]", quoted(&verb.to_ascii_uppercase())));
            format!("@router.api_route({})", args.join(", "))
        }
        known => format!("@router.{}({})", known.as_lower(), args.join(", ")),
    }
}

fn tenant_filter_marker() -> CodeFragment {
    CodeFragment::comment("#", "TODO: Add tenant filtering")
}

/// Select one record by key or answer 404.
fn lookup(target: &Target, param: &str) -> Vec<CodeFragment> {
    vec![
        CodeFragment::line(format!(
            "statement = select({model}).where({model}.{key} == {param})",
            model = target.model,
            key = target.key.name,
            param = param
        )),
        tenant_filter_marker(),
        CodeFragment::line("result = session.exec(statement).first()"),
        CodeFragment::block(
            "if not result:",
            vec![CodeFragment::line(
                "raise HTTPException(status_code=404, detail=\"Not found\")",
            )],
            None,
        ),
    ]
}

/// `GET /things`
pub struct ListHandler<'a> {
    pub path: &'a str,
    pub target: &'a Target,
    pub authenticated: bool,
    pub paginated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for ListHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let model = &self.target.model;
        let mut body = Vec::new();
        if self.paginated {
            body.push(CodeFragment::comment("#", "TODO: Add pagination (limit, offset)"));
        }
        body.extend([
            CodeFragment::line(format!("statement = select({})", model)),
            tenant_filter_marker(),
            CodeFragment::line("results = session.exec(statement).all()"),
            CodeFragment::line("return results"),
        ]);

        Handler::new(
            decorator(
                &HttpMethod::Get,
                self.path,
                &[format!("response_model=List[{}]", model)],
            ),
            format!("list_{}", self.target.table),
        )
        .param(SESSION_PARAM)
        .param_if(self.authenticated, USER_PARAM)
        .doc(self.doc)
        .body(body)
        .to_fragments()
    }
}

/// `GET /things/{id}`
pub struct GetHandler<'a> {
    pub path: &'a str,
    pub target: &'a Target,
    /// Path parameter carrying the key
    pub param: &'a str,
    pub authenticated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for GetHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = self.target;
        let mut body = lookup(target, self.param);
        body.push(CodeFragment::line("return result"));

        Handler::new(
            decorator(
                &HttpMethod::Get,
                self.path,
                &[format!("response_model={}", target.model)],
            ),
            format!("get_{}_by_id", target.table),
        )
        .param(format!("{}: {}", self.param, target.key.ty))
        .param(SESSION_PARAM)
        .param_if(self.authenticated, USER_PARAM)
        .doc(self.doc)
        .body(body)
        .to_fragments()
    }
}

/// `POST /things`
pub struct CreateHandler<'a> {
    pub path: &'a str,
    pub target: &'a Target,
    pub authenticated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for CreateHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = self.target;
        Handler::new(
            decorator(
                &HttpMethod::Post,
                self.path,
                &[
                    format!("response_model={}", target.model),
                    "status_code=201".to_string(),
                ],
            ),
            format!("create_{}", target.table),
        )
        .param(format!("data: {}", target.model))
        .param(SESSION_PARAM)
        .param_if(self.authenticated, USER_PARAM)
        .doc(self.doc)
        .body([
            CodeFragment::comment("#", "TODO: Set tenant_id from user"),
            CodeFragment::comment("#", "data.tenant_id = user.tenant_id"),
            CodeFragment::line("session.add(data)"),
            CodeFragment::line("session.commit()"),
            CodeFragment::line("session.refresh(data)"),
            CodeFragment::line("return data"),
        ])
        .to_fragments()
    }
}

/// `PUT /things/{id}` or `PATCH /things/{id}`
pub struct UpdateHandler<'a> {
    pub path: &'a str,
    pub method: &'a HttpMethod,
    pub target: &'a Target,
    pub param: &'a str,
    pub authenticated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for UpdateHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = self.target;
        let mut body = lookup(target, self.param);
        body.extend([
            CodeFragment::comment("#", "TODO: Update fields from data"),
            CodeFragment::line("session.add(result)"),
            CodeFragment::line("session.commit()"),
            CodeFragment::line("session.refresh(result)"),
            CodeFragment::line("return result"),
        ]);

        Handler::new(
            decorator(
                self.method,
                self.path,
                &[format!("response_model={}", target.model)],
            ),
            format!("update_{}", target.table),
        )
        .param(format!("{}: {}", self.param, target.key.ty))
        .param(format!("data: {}", target.model))
        .param(SESSION_PARAM)
        .param_if(self.authenticated, USER_PARAM)
        .doc(self.doc)
        .body(body)
        .to_fragments()
    }
}

/// `DELETE /things/{id}`
pub struct DeleteHandler<'a> {
    pub path: &'a str,
    pub target: &'a Target,
    pub param: &'a str,
    pub authenticated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for DeleteHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = self.target;
        let mut body = lookup(target, self.param);
        body.extend([
            CodeFragment::line("session.delete(result)"),
            CodeFragment::line("session.commit()"),
            CodeFragment::line("return None"),
        ]);

        Handler::new(
            decorator(&HttpMethod::Delete, self.path, &["status_code=204".to_string()]),
            format!("delete_{}", target.table),
        )
        .param(format!("{}: {}", self.param, target.key.ty))
        .param(SESSION_PARAM)
        .param_if(self.authenticated, USER_PARAM)
        .doc(self.doc)
        .body(body)
        .to_fragments()
    }
}

/// Stub for an endpoint without a table.
pub struct CustomHandler<'a> {
    pub path: &'a str,
    pub method: &'a HttpMethod,
    /// Function name without the `custom_` prefix
    pub slug: &'a str,
    pub path_params: &'a [&'a str],
    pub authenticated: bool,
    pub doc: Option<&'a str>,
}

impl Renderable for CustomHandler<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut handler = Handler::new(
            decorator(self.method, self.path, &[]),
            format!("custom_{}", self.slug),
        );
        for param in self.path_params {
            handler = handler.param(format!("{}: str", param));
        }

        handler
            .param_if(self.authenticated, USER_PARAM)
            .doc(self.doc)
            .body([
                CodeFragment::comment("#", "TODO: Implement custom logic"),
                CodeFragment::line("return {\"message\": \"Not implemented\"}"),
            ])
            .to_fragments()
    }
}
