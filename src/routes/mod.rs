pub mod sales_reps;
