//! Graph algorithms
mod traversal;
mod visitor;
pub use self::visitor::*;
mod dfs;
pub use self::dfs::*;
mod bfs;
pub use self::bfs::*;
mod delta;
pub use self::delta::*;
mod floyd_warshall;
pub use self::floyd_warshall::*;
