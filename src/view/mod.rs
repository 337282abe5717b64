/// Nine-panel grow-season overview
pub mod grow_season;
/// Single sun collector heatmap
pub mod single;
