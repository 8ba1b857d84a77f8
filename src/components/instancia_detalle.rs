use yew::prelude::*;

use crate::models::InstanciaReporte;
use crate::utils::date::{format_fecha, format_fecha_opt};

#[derive(Properties, PartialEq)]
pub struct InstanciaDetalleProps {
    pub instancia: InstanciaReporte,
}

/// Ficha de solo lectura de una instancia, compartida por los modales
/// de histórico, supervisión y envío.
#[function_component(InstanciaDetalle)]
pub fn instancia_detalle(props: &InstanciaDetalleProps) -> Html {
    let i = &props.instancia;

    let desviacion = match i.dias_desviacion {
        None => html! {},
        Some(d) if d < 0 => html! {
            <span class="badge badge-green">{format!("{} días antes ✓", d.abs())}</span>
        },
        Some(0) => html! { <span class="badge badge-blue">{"A tiempo ✓"}</span> },
        Some(d) => html! { <span class="badge badge-red">{format!("{} días tarde ⚠", d)}</span> },
    };

    html! {
        <div class="detalle-grid">
            <div class="detalle-item">
                <span class="detalle-label">{"Reporte"}</span>
                <span>{format!("{} ({})", i.reporte_nombre, i.reporte_id)}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Entidad"}</span>
                <span>{&i.entidad_nombre}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Periodo"}</span>
                <span>{&i.periodo_reportado}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Frecuencia"}</span>
                <span>{&i.frecuencia}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Vencimiento"}</span>
                <span>{format_fecha(&i.fecha_vencimiento_calculada)}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Fecha de envío"}</span>
                <span>{format_fecha_opt(&i.fecha_envio_real)}{" "}{desviacion}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Responsable"}</span>
                <span>{&i.responsable_elaboracion}</span>
            </div>
            <div class="detalle-item">
                <span class="detalle-label">{"Supervisor"}</span>
                <span>{&i.responsable_supervision}</span>
            </div>
            if let Some(formato) = &i.formato_requerido {
                <div class="detalle-item">
                    <span class="detalle-label">{"Formato requerido"}</span>
                    <span>{formato.clone()}</span>
                </div>
            }
            if let Some(base) = &i.base_legal {
                <div class="detalle-item">
                    <span class="detalle-label">{"Base legal"}</span>
                    <span>{base.clone()}</span>
                </div>
            }
            if let Some(link) = &i.link_reporte_final {
                <div class="detalle-item">
                    <span class="detalle-label">{"Reporte enviado"}</span>
                    <a href={link.clone()} target="_blank">{"Abrir enlace"}</a>
                </div>
            }
            if let Some(link) = &i.link_evidencia_envio {
                <div class="detalle-item">
                    <span class="detalle-label">{"Evidencia de envío"}</span>
                    <a href={link.clone()} target="_blank">{"Abrir enlace"}</a>
                </div>
            }
            if let Some(archivo) = &i.nombre_archivo {
                <div class="detalle-item">
                    <span class="detalle-label">{"Archivo"}</span>
                    <span>{archivo.clone()}</span>
                </div>
            }
            if let Some(enviado_por) = &i.enviado_por_nombre {
                <div class="detalle-item">
                    <span class="detalle-label">{"Enviado por"}</span>
                    <span>{enviado_por.clone()}</span>
                </div>
            }
            if let Some(observaciones) = &i.observaciones {
                <div class="detalle-item detalle-wide">
                    <span class="detalle-label">{"Observaciones"}</span>
                    <span>{observaciones.clone()}</span>
                </div>
            }
        </div>
    }
}
