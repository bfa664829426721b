//! crumbtrail - breadcrumb trails for paths and explicit item lists
//!
//! [`trail`] holds the derivation core: parsing a path into crumbs, choosing
//! between explicit and derived items, collapsing long trails and turning
//! the result into a presentational [`Node`](trail::Node) tree through a
//! caller-supplied [`LinkRenderer`](trail::LinkRenderer).
//!
//! [`backend`] turns that tree into text, HTML, or a ratatui line.

pub mod backend;
pub mod trail;
