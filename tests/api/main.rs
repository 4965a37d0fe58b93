mod helpers;
mod ping;
