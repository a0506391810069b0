pub mod room_service;
