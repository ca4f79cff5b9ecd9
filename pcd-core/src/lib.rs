pub mod pointcloud;
