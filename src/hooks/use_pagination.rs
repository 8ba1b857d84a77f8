use yew::prelude::*;

/// Número de páginas necesarias para `total_items` elementos.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    let per_page = items_per_page.max(1);
    total_items.div_ceil(per_page)
}

/// Índices [inicio, fin) de la página dada. El fin de la última página
/// se recorta a `total_items`.
pub fn page_bounds(page: usize, items_per_page: usize, total_items: usize) -> (usize, usize) {
    let per_page = items_per_page.max(1);
    let page = page.max(1);
    let start = ((page - 1) * per_page).min(total_items);
    let end = (page * per_page).min(total_items).max(start);
    (start, end)
}

#[derive(Clone, PartialEq)]
pub struct UsePaginationHandle<T: Clone + PartialEq> {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_items: Vec<T>,
    pub set_page: Callback<usize>,
    pub set_items_per_page: Callback<usize>,
}

/// Paginación en memoria sobre una lista ya filtrada. Cambiar el tamaño
/// de página o el número de elementos vuelve a la página 1.
#[hook]
pub fn use_pagination<T: Clone + PartialEq + 'static>(
    items: Vec<T>,
    initial_per_page: usize,
) -> UsePaginationHandle<T> {
    let current_page = use_state(|| 1usize);
    let items_per_page = use_state(move || initial_per_page);

    {
        let current_page = current_page.clone();
        use_effect_with((items.len(), *items_per_page), move |_| {
            current_page.set(1);
            || ()
        });
    }

    let total_items = items.len();
    let per_page = *items_per_page;
    let (start, end) = page_bounds(*current_page, per_page, total_items);
    let page_items = items[start..end].to_vec();

    let set_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| current_page.set(page))
    };
    let set_items_per_page = {
        let items_per_page = items_per_page.clone();
        Callback::from(move |n: usize| items_per_page.set(n))
    };

    UsePaginationHandle {
        current_page: *current_page,
        items_per_page: per_page,
        total_pages: total_pages(total_items, per_page),
        total_items,
        page_items,
        set_page,
        set_items_per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ultima_pagina_recortada_al_total() {
        // 23 elementos a 10 por página: la página 3 va de 20 a 23.
        assert_eq!(page_bounds(3, 10, 23), (20, 23));
        assert_eq!(page_bounds(1, 10, 23), (0, 10));
        assert_eq!(page_bounds(2, 10, 23), (10, 20));
    }

    #[test]
    fn pagina_fuera_de_rango_queda_vacia() {
        let (start, end) = page_bounds(9, 10, 23);
        assert_eq!(start, end);
    }

    #[test]
    fn total_de_paginas() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 5), 5);
    }

    #[test]
    fn lista_vacia_sin_panico() {
        assert_eq!(page_bounds(1, 10, 0), (0, 0));
    }
}
