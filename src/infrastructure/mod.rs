pub mod binance_dex_client;
