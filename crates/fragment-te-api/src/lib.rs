//! # fragment-te-api
//!
//! Engine-agnostic contract for fragment template engines. Defines the
//! [`Fragment`] input type, the [`TemplateEngine`] service-provider trait,
//! and the [`TemplateEngineError`] error hierarchy shared by all engine
//! adapters. Concrete engines (e.g. `fragment-te-jinja`) implement
//! [`TemplateEngine`] and are looked up by the host framework by name.

pub mod error;
pub mod fragment;
pub mod logging;

mod engine;

pub use engine::TemplateEngine;
pub use error::{TemplateEngineError, TemplateResult};
pub use fragment::Fragment;
