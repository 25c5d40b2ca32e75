pub mod kline_source;
