mod player;
mod roster_result;
mod status;
