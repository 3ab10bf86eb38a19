/// Tile composition for maze, lattice and blob layouts
pub mod compositor;
/// Corner exposure classification
pub mod corners;
/// Corrosion profiles and corner erosion
pub mod corrosion;
/// Growing-tree maze carving
pub mod maze;
/// Silhouette underline shading
pub mod shading;
