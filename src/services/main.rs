use crate::api::InventoryApi;
use crate::dashboard::{Action, Dashboard};
use crate::dto::main::{CategoryOption, IndexPageData, SearchBarView};
use crate::dto::metrics::MetricsView;
use crate::dto::products::{ProductFormView, ProductRow};
use crate::forms::main::SearchForm;
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Loads everything the dashboard page renders, mounting the dashboard on
/// its first visit.
pub async fn load_index_page<A>(dashboard: &mut Dashboard, api: &A) -> ServiceResult<IndexPageData>
where
    A: InventoryApi + ?Sized,
{
    if !dashboard.is_mounted() {
        dashboard.mount(api).await;
    }

    let state = dashboard.state();

    // Selected categories missing from the current page stay visible so the
    // next search does not silently drop them.
    let mut categories: Vec<CategoryOption> = state
        .categories()
        .iter()
        .map(|name| CategoryOption {
            name: name.clone(),
            selected: state.selected_categories().contains(name),
        })
        .collect();
    categories.extend(
        state
            .selected_categories()
            .iter()
            .filter(|name| !state.categories().contains(*name))
            .map(|name| CategoryOption {
                name: name.clone(),
                selected: true,
            }),
    );

    let search = SearchBarView {
        name: state.name().to_string(),
        categories,
        availability: state.availability().as_str(),
    };

    let rows = dashboard
        .products()
        .data()
        .iter()
        .map(ProductRow::from)
        .collect();
    let products = Paginated::new(rows, state.page(), state.page_size());

    let form = state
        .show_form()
        .then(|| ProductFormView::new(state.editing(), state.categories()));

    Ok(IndexPageData {
        search,
        products,
        form,
        metrics: dashboard.metrics().data().map(MetricsView::from),
        products_error: dashboard
            .products()
            .state()
            .error()
            .map(|err| err.to_string()),
        metrics_error: dashboard
            .metrics()
            .state()
            .error()
            .map(|err| err.to_string()),
    })
}

/// Applies the search bar values and reloads from the first page.
pub async fn search<A>(dashboard: &mut Dashboard, api: &A, form: SearchForm) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    for change in form.into_changes() {
        dashboard.apply(Action::SetFilter(change));
    }
    dashboard.search(api).await;
    Ok(())
}

pub async fn clear<A>(dashboard: &mut Dashboard, api: &A) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    dashboard.clear(api).await;
    Ok(())
}

pub async fn next_page<A>(dashboard: &mut Dashboard, api: &A) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    dashboard.next_page(api).await;
    Ok(())
}

pub async fn prev_page<A>(dashboard: &mut Dashboard, api: &A) -> ServiceResult<()>
where
    A: InventoryApi + ?Sized,
{
    dashboard.prev_page(api).await;
    Ok(())
}
