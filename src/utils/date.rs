use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

const MESES_CORTOS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Abreviatura del mes (1-12) en español.
pub fn mes_corto(mes: u32) -> &'static str {
    MESES_CORTOS[((mes.clamp(1, 12)) - 1) as usize]
}

/// Normaliza una cadena de fecha a fecha de calendario local, ignorando
/// hora y zona horaria. Acepta `YYYY-MM-DD`, `YYYY-MM` (primer día del
/// mes) y timestamps ISO como último recurso. Parsear el timestamp
/// completo directamente produce errores de un día según la zona.
pub fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    None
}

/// Días de atraso respecto al vencimiento. Ambas fechas se llevan al fin
/// del día antes de aplicar el techo de la división, lo que colapsa en
/// una resta entera de fechas: vencido ayer = 1, vence hoy = 0, vence
/// mañana = -1.
pub fn dias_vencido(vencimiento: NaiveDate, hoy: NaiveDate) -> i64 {
    (hoy - vencimiento).num_days()
}

/// Días restantes hasta el vencimiento (forma negada de `dias_vencido`).
pub fn dias_restantes(vencimiento: NaiveDate, hoy: NaiveDate) -> i64 {
    -dias_vencido(vencimiento, hoy)
}

pub fn hoy_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Formato corto "05 Mar 2026" para celdas de tabla.
pub fn format_fecha(s: &str) -> String {
    match parse_date_only(s) {
        Some(d) => format!(
            "{:02} {} {}",
            d.day(),
            MESES_CORTOS[d.month0() as usize],
            d.year()
        ),
        None => s.to_string(),
    }
}

pub fn format_fecha_opt(s: &Option<String>) -> String {
    match s {
        Some(v) => format_fecha(v),
        None => "N/A".to_string(),
    }
}

/// Tiempo relativo para la bandeja de notificaciones.
pub fn tiempo_relativo(fecha: &str, ahora: DateTime<Utc>) -> String {
    let parsed = match DateTime::parse_from_rfc3339(fecha) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return fecha.to_string(),
    };
    let diff = ahora.signed_duration_since(parsed);
    let minutos = diff.num_minutes();
    let horas = diff.num_hours();
    let dias = diff.num_days();

    if minutos < 1 {
        "Ahora".to_string()
    } else if minutos < 60 {
        format!("{} min", minutos)
    } else if horas < 24 {
        format!("{}h", horas)
    } else if dias < 7 {
        format!("{}d", dias)
    } else {
        format_fecha(fecha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parsea_fecha_completa() {
        assert_eq!(parse_date_only("2026-03-05"), Some(d(2026, 3, 5)));
        assert_eq!(parse_date_only("  2026-03-05 "), Some(d(2026, 3, 5)));
    }

    #[test]
    fn parsea_mes_como_primer_dia() {
        assert_eq!(parse_date_only("2026-03"), Some(d(2026, 3, 1)));
    }

    #[test]
    fn cadena_invalida_es_none() {
        assert_eq!(parse_date_only("no-es-fecha"), None);
        assert_eq!(parse_date_only(""), None);
    }

    #[test]
    fn dias_vencido_sin_error_de_un_dia() {
        let hoy = d(2026, 8, 6);
        assert_eq!(dias_vencido(d(2026, 8, 5), hoy), 1);
        assert_eq!(dias_vencido(d(2026, 8, 6), hoy), 0);
        assert_eq!(dias_vencido(d(2026, 8, 7), hoy), -1);
        assert_eq!(dias_restantes(d(2026, 8, 13), hoy), 7);
    }

    #[test]
    fn formato_corto() {
        assert_eq!(format_fecha("2026-01-09"), "09 Ene 2026");
        assert_eq!(format_fecha("2025-12-31"), "31 Dic 2025");
        // Entrada irreconocible se muestra tal cual
        assert_eq!(format_fecha("???"), "???");
    }

    #[test]
    fn tiempo_relativo_escalas() {
        let ahora = DateTime::parse_from_rfc3339("2026-08-06T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(tiempo_relativo("2026-08-06T11:59:40Z", ahora), "Ahora");
        assert_eq!(tiempo_relativo("2026-08-06T11:30:00Z", ahora), "30 min");
        assert_eq!(tiempo_relativo("2026-08-06T07:00:00Z", ahora), "5h");
        assert_eq!(tiempo_relativo("2026-08-03T12:00:00Z", ahora), "3d");
    }
}
