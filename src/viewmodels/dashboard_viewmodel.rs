// ============================================================================
// DASHBOARD VIEWMODEL - agregación de cumplimiento en memoria
// ============================================================================
// Todas las métricas derivadas de listas de instancias viven aquí como
// funciones puras; las vistas solo traen los datos y renderizan.
// ============================================================================

use chrono::{Datelike, NaiveDate};

use crate::models::InstanciaReporte;
use crate::utils::date::{mes_corto, parse_date_only};

/// Enviado en o antes del vencimiento. Sin desviación registrada cuenta
/// como a tiempo.
pub fn es_a_tiempo(instancia: &InstanciaReporte) -> bool {
    instancia.enviado && instancia.dias_desviacion.map_or(true, |d| d <= 0)
}

pub fn es_enviado_tarde(instancia: &InstanciaReporte) -> bool {
    instancia.enviado && instancia.dias_desviacion.map_or(false, |d| d > 0)
}

pub fn es_vencido_sin_enviar(instancia: &InstanciaReporte) -> bool {
    instancia.vencido && !instancia.enviado
}

/// Porcentaje de cumplimiento: round(100 × a-tiempo / total).
/// Un alcance vacío es 0, nunca una división por cero.
pub fn porcentaje_cumplimiento(instancias: &[InstanciaReporte]) -> u32 {
    if instancias.is_empty() {
        return 0;
    }
    let a_tiempo = instancias.iter().filter(|i| es_a_tiempo(i)).count();
    ((a_tiempo as f64 / instancias.len() as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResumenGeneral {
    pub total_reportes: usize,
    pub reportes_pendientes: usize,
    pub reportes_enviados: usize,
    pub reportes_vencidos: usize,
    pub porcentaje_cumplimiento: u32,
    pub enviados_a_tiempo: usize,
    pub enviados_tarde: usize,
}

pub fn resumen_general(instancias: &[InstanciaReporte], pendientes: usize) -> ResumenGeneral {
    ResumenGeneral {
        total_reportes: instancias.len(),
        reportes_pendientes: pendientes,
        reportes_enviados: instancias.iter().filter(|i| i.enviado).count(),
        reportes_vencidos: instancias.iter().filter(|i| es_vencido_sin_enviar(i)).count(),
        porcentaje_cumplimiento: porcentaje_cumplimiento(instancias),
        enviados_a_tiempo: instancias.iter().filter(|i| es_a_tiempo(i)).count(),
        enviados_tarde: instancias.iter().filter(|i| es_enviado_tarde(i)).count(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CumplimientoGrupo {
    pub nombre: String,
    pub total: usize,
    pub a_tiempo: usize,
    pub vencidos: usize,
    pub porcentaje: u32,
}

fn cumplimiento_por<F>(instancias: &[InstanciaReporte], clave: F) -> Vec<CumplimientoGrupo>
where
    F: Fn(&InstanciaReporte) -> &str,
{
    let mut nombres: Vec<&str> = Vec::new();
    for instancia in instancias {
        let k = clave(instancia);
        if !k.is_empty() && !nombres.contains(&k) {
            nombres.push(k);
        }
    }

    let mut grupos: Vec<CumplimientoGrupo> = nombres
        .into_iter()
        .map(|nombre| {
            let del_grupo: Vec<&InstanciaReporte> =
                instancias.iter().filter(|i| clave(i) == nombre).collect();
            let a_tiempo = del_grupo.iter().filter(|i| es_a_tiempo(i)).count();
            let vencidos = del_grupo.iter().filter(|i| es_vencido_sin_enviar(i)).count();
            let porcentaje = ((a_tiempo as f64 / del_grupo.len() as f64) * 100.0).round() as u32;
            CumplimientoGrupo {
                nombre: nombre.to_string(),
                total: del_grupo.len(),
                a_tiempo,
                vencidos,
                porcentaje,
            }
        })
        .collect();

    grupos.sort_by(|a, b| b.porcentaje.cmp(&a.porcentaje));
    grupos
}

/// Cumplimiento agrupado por entidad, ordenado de mejor a peor.
pub fn cumplimiento_por_entidad(instancias: &[InstanciaReporte]) -> Vec<CumplimientoGrupo> {
    cumplimiento_por(instancias, |i| &i.entidad_nombre)
}

/// Cumplimiento agrupado por responsable de elaboración.
pub fn cumplimiento_por_responsable(instancias: &[InstanciaReporte]) -> Vec<CumplimientoGrupo> {
    cumplimiento_por(instancias, |i| &i.responsable_elaboracion)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TendenciaMes {
    pub mes: String,
    pub cumplimiento: u32,
    pub enviados: usize,
    pub vencidos: usize,
}

/// (año, mes 1-12) retrocediendo `atras` meses desde el mes dado.
fn mes_retrocedido(year: i32, mes: u32, atras: u32) -> (i32, u32) {
    let total = year as i64 * 12 + (mes as i64 - 1) - atras as i64;
    let y = total.div_euclid(12);
    let m = total.rem_euclid(12) + 1;
    (y as i32, m as u32)
}

/// Tendencia de cumplimiento de los últimos `meses` meses calendario
/// (ventana que termina en el mes de `hoy`). Los meses sin instancias
/// se incluyen como 0 %.
pub fn tendencia_mensual(
    instancias: &[InstanciaReporte],
    hoy: NaiveDate,
    meses: u32,
) -> Vec<TendenciaMes> {
    let mut tendencia = Vec::with_capacity(meses as usize);

    for atras in (0..meses).rev() {
        let (year, mes) = mes_retrocedido(hoy.year(), hoy.month(), atras);

        let del_mes: Vec<&InstanciaReporte> = instancias
            .iter()
            .filter(|i| {
                parse_date_only(&i.fecha_vencimiento_calculada)
                    .map_or(false, |d| d.year() == year && d.month() == mes)
            })
            .collect();

        let enviados = del_mes.iter().filter(|i| es_a_tiempo(i)).count();
        let vencidos = del_mes.iter().filter(|i| es_vencido_sin_enviar(i)).count();
        let cumplimiento = if del_mes.is_empty() {
            0
        } else {
            ((enviados as f64 / del_mes.len() as f64) * 100.0).round() as u32
        };

        tendencia.push(TendenciaMes {
            mes: format!("{} {}", mes_corto(mes), year % 100),
            cumplimiento,
            enviados,
            vencidos,
        });
    }

    tendencia
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstadoSlice {
    pub nombre: &'static str,
    pub valor: usize,
    pub color: &'static str,
}

/// Distribución de estado para el gráfico de torta. Solo porciones > 0.
pub fn distribucion_estado(resumen: &ResumenGeneral) -> Vec<EstadoSlice> {
    let proximos = resumen
        .reportes_pendientes
        .saturating_sub(resumen.reportes_vencidos);

    [
        EstadoSlice { nombre: "A Tiempo", valor: resumen.enviados_a_tiempo, color: "#10B981" },
        EstadoSlice { nombre: "Tarde", valor: resumen.enviados_tarde, color: "#F59E0B" },
        EstadoSlice { nombre: "No Reportado", valor: resumen.reportes_vencidos, color: "#EF4444" },
        EstadoSlice { nombre: "Próx. a Vencer", valor: proximos, color: "#6B7280" },
    ]
    .into_iter()
    .filter(|s| s.valor > 0)
    .collect()
}

/// Acorta etiquetas largas para los ejes de las gráficas.
pub fn truncar(nombre: &str, max: usize) -> String {
    if nombre.chars().count() > max {
        let cortado: String = nombre.chars().take(max).collect();
        format!("{}...", cortado)
    } else {
        nombre.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instancia(
        id: i64,
        entidad: &str,
        responsable: &str,
        vencimiento: &str,
        enviado: bool,
        vencido: bool,
        desviacion: Option<i64>,
    ) -> InstanciaReporte {
        InstanciaReporte {
            id,
            reporte_id: format!("RPT-{:03}", id),
            reporte_nombre: format!("Reporte {}", id),
            entidad_nombre: entidad.to_string(),
            periodo_reportado: "2026-Q2".to_string(),
            fecha_vencimiento_calculada: vencimiento.to_string(),
            fecha_envio_real: enviado.then(|| vencimiento.to_string()),
            estado: if enviado { "ENVIADO" } else { "PENDIENTE" }.to_string(),
            prioridad: "ALTA".to_string(),
            dias_hasta_vencimiento: 0,
            dias_desviacion: desviacion,
            enviado,
            vencido,
            responsable_elaboracion: responsable.to_string(),
            responsable_supervision: "Supervisor General".to_string(),
            responsable_supervision_id: Some(1),
            frecuencia: "MENSUAL".to_string(),
            formato_requerido: None,
            base_legal: None,
            link_reporte_final: None,
            link_evidencia_envio: None,
            nombre_archivo: None,
            observaciones: None,
            enviado_por_nombre: None,
        }
    }

    /// 6 enviados a tiempo, 2 enviados tarde, 2 vencidos sin enviar.
    fn escenario_diez() -> Vec<InstanciaReporte> {
        let mut items = Vec::new();
        for id in 0..6 {
            items.push(instancia(id, "Entidad A", "Ana", "2026-05-10", true, false, Some(-1)));
        }
        for id in 6..8 {
            items.push(instancia(id, "Entidad B", "Luis", "2026-05-10", true, false, Some(3)));
        }
        for id in 8..10 {
            items.push(instancia(id, "Entidad B", "Luis", "2026-05-10", false, true, None));
        }
        items
    }

    #[test]
    fn escenario_de_diez_instancias() {
        let items = escenario_diez();
        let resumen = resumen_general(&items, 2);

        assert_eq!(resumen.porcentaje_cumplimiento, 60);
        assert_eq!(resumen.enviados_a_tiempo, 6);
        assert_eq!(resumen.enviados_tarde, 2);
        assert_eq!(resumen.reportes_vencidos, 2);
        assert_eq!(resumen.total_reportes, 10);
    }

    #[test]
    fn alcance_vacio_es_cero() {
        assert_eq!(porcentaje_cumplimiento(&[]), 0);
        let resumen = resumen_general(&[], 0);
        assert_eq!(resumen.porcentaje_cumplimiento, 0);
    }

    #[test]
    fn porcentaje_siempre_entre_0_y_100() {
        let todos_a_tiempo: Vec<_> = (0..4)
            .map(|id| instancia(id, "E", "R", "2026-05-10", true, false, Some(0)))
            .collect();
        assert_eq!(porcentaje_cumplimiento(&todos_a_tiempo), 100);

        let ninguno: Vec<_> = (0..4)
            .map(|id| instancia(id, "E", "R", "2026-05-10", false, true, None))
            .collect();
        assert_eq!(porcentaje_cumplimiento(&ninguno), 0);
    }

    #[test]
    fn sin_desviacion_registrada_cuenta_como_a_tiempo() {
        let items = vec![instancia(1, "E", "R", "2026-05-10", true, false, None)];
        assert_eq!(porcentaje_cumplimiento(&items), 100);
    }

    #[test]
    fn agrupa_por_entidad_ordenado_desc() {
        let items = escenario_diez();
        let grupos = cumplimiento_por_entidad(&items);

        assert_eq!(grupos.len(), 2);
        // Entidad A: 6/6 a tiempo; Entidad B: 0/4
        assert_eq!(grupos[0].nombre, "Entidad A");
        assert_eq!(grupos[0].porcentaje, 100);
        assert_eq!(grupos[1].nombre, "Entidad B");
        assert_eq!(grupos[1].porcentaje, 0);
        assert_eq!(grupos[1].vencidos, 2);
    }

    #[test]
    fn agrupa_por_responsable() {
        let items = escenario_diez();
        let grupos = cumplimiento_por_responsable(&items);
        assert_eq!(grupos.len(), 2);
        assert_eq!(grupos[0].nombre, "Ana");
        assert_eq!(grupos[0].total, 6);
        assert_eq!(grupos[1].nombre, "Luis");
        assert_eq!(grupos[1].total, 4);
    }

    #[test]
    fn tendencia_incluye_meses_sin_instancias_como_cero() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let items = vec![
            instancia(1, "E", "R", "2026-08-05", true, false, Some(0)),
            instancia(2, "E", "R", "2026-06-15", true, false, Some(2)),
            instancia(3, "E", "R", "2026-06-20", false, true, None),
        ];

        let tendencia = tendencia_mensual(&items, hoy, 6);
        assert_eq!(tendencia.len(), 6);
        assert_eq!(tendencia[0].mes, "Mar 26");
        assert_eq!(tendencia[5].mes, "Ago 26");

        // Julio no tiene instancias: aparece con 0 %
        assert_eq!(tendencia[4].mes, "Jul 26");
        assert_eq!(tendencia[4].cumplimiento, 0);
        assert_eq!(tendencia[4].enviados, 0);

        // Junio: 1 de 2 a tiempo
        assert_eq!(tendencia[3].cumplimiento, 50);
        assert_eq!(tendencia[3].vencidos, 1);

        // Agosto: 1 de 1
        assert_eq!(tendencia[5].cumplimiento, 100);
    }

    #[test]
    fn ventana_de_tendencia_cruza_el_cambio_de_year() {
        let hoy = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let tendencia = tendencia_mensual(&[], hoy, 6);
        assert_eq!(tendencia[0].mes, "Sep 25");
        assert_eq!(tendencia[5].mes, "Feb 26");
    }

    #[test]
    fn distribucion_omite_porciones_vacias() {
        let items = escenario_diez();
        let resumen = resumen_general(&items, 2);
        let slices = distribucion_estado(&resumen);

        // pendientes(2) - vencidos(2) = 0 próximos, esa porción se omite
        let nombres: Vec<&str> = slices.iter().map(|s| s.nombre).collect();
        assert_eq!(nombres, vec!["A Tiempo", "Tarde", "No Reportado"]);
    }

    #[test]
    fn truncado_de_etiquetas() {
        assert_eq!(truncar("Corta", 20), "Corta");
        assert_eq!(
            truncar("Superintendencia de Servicios Públicos", 20),
            "Superintendencia de ..."
        );
    }
}
