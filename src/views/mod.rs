pub mod alertas;
pub mod dashboard_admin;
pub mod dashboard_auditor;
pub mod dashboard_responsable;
pub mod dashboard_supervisor;
pub mod entidades;
pub mod historico;
pub mod home;
pub mod login;
pub mod mis_reportes;
pub mod reportes;
pub mod signup;
pub mod supervision;
pub mod usuarios;

pub use alertas::AlertasView;
pub use entidades::EntidadesView;
pub use historico::HistoricoView;
pub use home::HomeView;
pub use login::SignInView;
pub use mis_reportes::MisReportesView;
pub use reportes::ReportesView;
pub use signup::SignUpView;
pub use supervision::SupervisionView;
pub use usuarios::UsuariosView;
