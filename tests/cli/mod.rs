mod make;
mod resolve;
