//! Ports connecting the gateway to the collaborators a deployment plugs in.

pub mod outbound;

pub use outbound::{SimulatedSink, SubmissionSink};
