pub mod d400_package_overview;
