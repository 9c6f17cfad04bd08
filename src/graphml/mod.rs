//! yEd GraphML diagrams.
//!
//! Both yEd flavours share one reading algorithm ([`reader`]); the
//! [`GraphMlDialect`] implementations only say how a node qualifies as a
//! component, where labels and geometry live, and how edge line styles map to
//! stereotypes.
//!
//! - [`DesktopDialect`] - files saved by the yEd desktop editor
//! - [`OnlineDialect`] - files saved by yEd Live

mod desktop;
mod online;
pub mod reader;

pub use desktop::DesktopDialect;
pub use online::{OnlineDialect, is_online_export};
pub use reader::{EdgeStereotype, GraphMlDialect, read};
