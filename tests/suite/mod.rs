mod persistence;
mod stopwatch_flow;
