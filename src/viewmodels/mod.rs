pub mod dashboard_viewmodel;
