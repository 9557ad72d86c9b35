//! Label layout and rendering engine for custom-label orders.
//!
//! An order's label specs flow through geometry resolution, text layout and
//! scene rendering to produce vector output, while the same specs expand into
//! a row-per-unit tabular export. Everything here is pure and synchronous;
//! file writing, container encoding and delivery belong to the callers.

pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod order;
pub mod scene;
pub mod summary;
pub mod svg;

pub use error::OrderError;
pub use model::{LabelSpec, Order};
pub use order::{process, OrderArtifacts};
