pub mod goal_plan;
