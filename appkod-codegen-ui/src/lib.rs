//! Next.js page generation for the Appkod blueprint generator.
//!
//! Every page of a blueprint becomes one client component under the Next.js
//! `app` directory. The page fetches its data from `/api<path>` on mount and
//! renders its component tree (see [`ComponentMarkup`]).
//!
//! Routes map onto the file system the way the App Router expects:
//!
//! - `/` becomes `web/app/page.tsx`
//! - `/customers` becomes `web/app/customers/page.tsx`
//! - `/customers/{id}` becomes `web/app/customers/[id]/page.tsx`

mod generator;
mod import;

pub mod component;
pub mod page;

pub use component::ComponentMarkup;
pub use generator::UiGenerator;
pub use import::Import;
pub use page::PageModule;
