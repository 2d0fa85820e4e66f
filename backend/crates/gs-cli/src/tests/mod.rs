mod client;
mod sse_decoder;
