pub mod params_writer;
