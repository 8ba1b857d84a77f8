use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Elemento de la botonera de páginas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Num(usize),
    Ellipsis,
}

/// Ventana de números de página visibles: primera y última siempre,
/// vecinas de la actual, elipsis en los huecos.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    const MAX_VISIBLE: usize = 5;
    let mut pages = Vec::new();

    if total <= MAX_VISIBLE + 2 {
        for page in 1..=total {
            pages.push(PageItem::Num(page));
        }
        return pages;
    }

    pages.push(PageItem::Num(1));
    if current > 3 {
        pages.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        pages.push(PageItem::Num(page));
    }

    if current + 2 < total {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Num(total));

    pages
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub on_page_change: Callback<usize>,
    pub on_items_per_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_items == 0 {
        return html! {};
    }

    let start_item = (props.current_page - 1) * props.items_per_page + 1;
    let end_item = (props.current_page * props.items_per_page).min(props.total_items);

    let on_prev = {
        let on_page_change = props.on_page_change.clone();
        let current = props.current_page;
        Callback::from(move |_: MouseEvent| on_page_change.emit(current - 1))
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let current = props.current_page;
        Callback::from(move |_: MouseEvent| on_page_change.emit(current + 1))
    };
    let on_per_page = {
        let on_items_per_page_change = props.on_items_per_page_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(n) = select.value().parse::<usize>() {
                    on_items_per_page_change.emit(n);
                }
            }
        })
    };

    html! {
        <div class="pagination">
            <div class="pagination-info">
                <span>
                    {format!("Mostrando {} a {} de {} resultados", start_item, end_item, props.total_items)}
                </span>
                <select onchange={on_per_page}>
                    {
                        [5usize, 10, 20, 50].into_iter().map(|n| html! {
                            <option
                                key={n.to_string()}
                                value={n.to_string()}
                                selected={props.items_per_page == n}
                            >
                                {format!("{} por página", n)}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <div class="pagination-controls">
                <button
                    onclick={on_prev}
                    disabled={props.current_page == 1}
                    title="Página anterior"
                >
                    {"‹"}
                </button>
                {
                    visible_pages(props.current_page, props.total_pages)
                        .into_iter()
                        .enumerate()
                        .map(|(idx, item)| match item {
                            PageItem::Ellipsis => html! {
                                <span key={format!("e-{}", idx)} class="pagination-ellipsis">{"..."}</span>
                            },
                            PageItem::Num(page) => {
                                let on_page = {
                                    let on_page_change = props.on_page_change.clone();
                                    Callback::from(move |_: MouseEvent| on_page_change.emit(page))
                                };
                                let class = if page == props.current_page {
                                    "pagination-page active"
                                } else {
                                    "pagination-page"
                                };
                                html! {
                                    <button key={page.to_string()} class={class} onclick={on_page}>
                                        {page}
                                    </button>
                                }
                            }
                        })
                        .collect::<Html>()
                }
                <button
                    onclick={on_next}
                    disabled={props.current_page == props.total_pages}
                    title="Página siguiente"
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Num};

    #[test]
    fn pocas_paginas_sin_elipsis() {
        assert_eq!(
            visible_pages(2, 5),
            vec![Num(1), Num(2), Num(3), Num(4), Num(5)]
        );
    }

    #[test]
    fn elipsis_a_ambos_lados_en_el_medio() {
        assert_eq!(
            visible_pages(10, 20),
            vec![Num(1), Ellipsis, Num(9), Num(10), Num(11), Ellipsis, Num(20)]
        );
    }

    #[test]
    fn sin_elipsis_inicial_cerca_del_comienzo() {
        assert_eq!(
            visible_pages(2, 20),
            vec![Num(1), Num(2), Num(3), Ellipsis, Num(20)]
        );
    }

    #[test]
    fn sin_elipsis_final_cerca_del_fin() {
        assert_eq!(
            visible_pages(19, 20),
            vec![Num(1), Ellipsis, Num(18), Num(19), Num(20)]
        );
    }
}
