pub mod fw_server;
