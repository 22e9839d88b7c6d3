pub mod knnviz_env;
