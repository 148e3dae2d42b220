//! Núcleo de cálculo separado em biblioteca para que o CLI e futuras
//! interfaces gráficas usem as mesmas fórmulas.

pub mod app;
pub mod config;
pub mod cost;
pub mod currency;
pub mod i18n;
pub mod ui_cli;
