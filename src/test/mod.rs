
mod test_moves;
mod test_reachability;
mod test_undo;
