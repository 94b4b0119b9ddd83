//! Graph elements: identities, vertices, edges and their kinds.

mod ids;
pub use self::ids::*;
mod graph_element;
pub use self::graph_element::*;
mod kind;
pub use self::kind::*;
mod registry;
pub use self::registry::*;
mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod type_manager;
pub use self::type_manager::*;
