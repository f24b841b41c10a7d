pub mod pickups_csv;
