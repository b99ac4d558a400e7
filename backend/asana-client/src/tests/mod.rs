mod asana_client;
mod credential;
mod decode_response;
mod log_capture;
