//! # gt-flow
//!
//! Built-in training flows for GraphTune.
//!
//! Provides the flow-kind registry (`build_flow`) and deterministic
//! synthetic flows that stand in for full GNN training pipelines. Real
//! pipelines plug in through the `FlowBuilder` trait from `gt-types`.

mod builder;
mod kind;
mod synthetic;

pub use builder::{build_flow, KindBuilder};
pub use kind::FlowKind;
pub use synthetic::SyntheticFlow;
