mod fastest_route;
mod state;

pub use fastest_route::fastest_route;
