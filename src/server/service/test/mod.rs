mod assessment;
mod attendance;
mod schedule;
