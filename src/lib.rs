//! # bispanning
//!
//! A Rust library for decomposing an undirected multigraph into two
//! edge-disjoint spanning trees and for exploring the exchange structure
//! of such decompositions: the cycle and cut a recolored edge induces,
//! which edges repair them, whether an exchange is forced, and whether the
//! graph is an atomic bispanner.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use bispanning::types::from_edge_list;
//! use bispanning::{decompose, is_atomic, is_okay};
//!
//! // K4 is the smallest simple bispanning graph, and it is atomic
//! let mut graph = from_edge_list(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
//! assert!(decompose(&mut graph));
//! assert!(is_okay(&graph));
//! assert!(is_atomic(&graph));
//! ```

pub mod atomic;
pub mod decompose;
pub mod exchange;
pub mod output;
pub mod set_partition;
pub mod testing;
pub mod types;
pub mod union_find;

pub use atomic::is_atomic;
pub use decompose::decompose;
pub use decompose::is_okay;
pub use exchange::ExchangeAnalyzer;
pub use types::BiGraph;
pub use types::EdgeColor;
