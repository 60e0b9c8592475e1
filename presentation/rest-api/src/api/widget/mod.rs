pub mod renderer;
pub mod routes;
