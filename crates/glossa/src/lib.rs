#![forbid(unsafe_code)]

//! Namespaced translation lookup with `{{name}}` interpolation.
//!
//! An [`I18n`] store holds one language's [`ResourceTree`]. Keys are
//! written `[namespace:]path.to.leaf`; leaves may contain `{{name}}`
//! placeholders that must match the passed [`Substitutions`] exactly.
//! [`I18n::resolve_fragments`] splits a leaf into [`Fragment`]s so
//! placeholders can carry rich content.

pub mod error;
pub mod fragment;
pub mod key;
pub mod load;
pub mod placeholder;
pub mod resolver;
pub mod resource;
pub mod store;

pub use error::{I18nError, LoadError};
pub use fragment::{Fragment, FragmentArgs, FragmentPolicy, compact};
pub use key::KeyExpr;
pub use load::{AdditionNode, NodeData, NodeList, TranslationNode, load_locale};
pub use resolver::Substitutions;
pub use resource::{ResourceNode, ResourceTree};
pub use store::I18n;
