mod projection;

pub use projection::ProjectionView;
