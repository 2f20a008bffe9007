use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    audit,
    domain::customers::{AddressDraft, CustomerDraft},
    dto::customers::{AddressList, CreateAddressRequest, CreateCustomerRequest, CustomerList},
    entity::{Addresses, Customers, addresses, customers},
    error::{AppError, AppResult},
    models::{AddressView, CustomerView, OrderedProducts},
    response::{ApiResponse, Meta},
    routes::params::{DEFAULT_PER_PAGE, ListQuery},
    services::{aggregation, integrity, read_snapshot, search_term, starts_with_ci},
    state::AppState,
};

/// Customers ordered by first then last name. `q` matches the start of
/// either name, ignoring case.
pub async fn list_customers(
    state: &AppState,
    query: ListQuery,
) -> AppResult<ApiResponse<CustomerList>> {
    let window = query.pagination().window(DEFAULT_PER_PAGE);
    let finder = Customers::find()
        .filter(name_prefix(query.q.as_deref()))
        .order_by_asc(customers::Column::FirstName)
        .order_by_asc(customers::Column::LastName)
        .order_by_asc(customers::Column::Id);

    let txn = read_snapshot(&state.orm).await?;
    let total = finder.clone().count(&txn).await? as i64;
    let models = if window.is_empty() {
        Vec::new()
    } else {
        finder
            .limit(window.per_page as u64)
            .offset(window.offset as u64)
            .all(&txn)
            .await?
    };
    txn.commit().await?;

    let items = models.into_iter().map(CustomerView::from).collect();
    Ok(ApiResponse::success(
        "Customers",
        CustomerList { items },
        Some(window.meta(total)),
    ))
}

pub(crate) fn name_prefix(q: Option<&str>) -> Condition {
    match search_term(q) {
        Some(search) => Condition::any()
            .add(starts_with_ci((Customers, customers::Column::FirstName), search))
            .add(starts_with_ci((Customers, customers::Column::LastName), search)),
        None => Condition::all(),
    }
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ApiResponse<CustomerView>> {
    let customer = CustomerDraft::from(payload).validate()?;
    let customer = customers::ActiveModel {
        first_name: Set(customer.first_name),
        last_name: Set(customer.last_name),
        email: Set(customer.email),
        phone: Set(customer.phone),
        birth_date: Set(customer.birth_date),
        membership: Set(customer.membership.code().to_string()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.orm,
        "customer_create",
        "customers",
        serde_json::json!({ "customer_id": customer.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Customer created",
        CustomerView::from(customer),
        Some(Meta::empty()),
    ))
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<ApiResponse<CustomerView>> {
    let customer = Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Customer", CustomerView::from(customer), None))
}

pub async fn delete_customer(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    integrity::delete_customer(&state.orm, id).await?;

    audit::record(
        &state.orm,
        "customer_delete",
        "customers",
        serde_json::json!({ "customer_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn add_address(
    state: &AppState,
    customer_id: i32,
    payload: CreateAddressRequest,
) -> AppResult<ApiResponse<AddressView>> {
    let address = AddressDraft::from(payload).validate()?;
    if Customers::find_by_id(customer_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }

    let address = addresses::ActiveModel {
        street: Set(address.street),
        city: Set(address.city),
        zip: Set(address.zip),
        customer_id: Set(customer_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Address created",
        AddressView::from(address),
        Some(Meta::empty()),
    ))
}

pub async fn list_addresses(
    state: &AppState,
    customer_id: i32,
) -> AppResult<ApiResponse<AddressList>> {
    if Customers::find_by_id(customer_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }
    let items: Vec<AddressView> = Addresses::find()
        .filter(addresses::Column::CustomerId.eq(customer_id))
        .order_by_asc(addresses::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(AddressView::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Addresses",
        AddressList { items },
        Some(Meta::new(1, total, total)),
    ))
}

/// Distinct titles of everything the customer has ordered, plus the
/// rendered list.
pub async fn ordered_products(
    state: &AppState,
    customer_id: i32,
) -> AppResult<ApiResponse<OrderedProducts>> {
    if Customers::find_by_id(customer_id).count(&state.orm).await? == 0 {
        return Err(AppError::NotFound);
    }
    let titles = aggregation::ordered_product_titles(&state.orm, customer_id).await?;
    let display = aggregation::render_titles(&titles, &state.config.empty_list_sentinel);

    Ok(ApiResponse::success(
        "Ordered products",
        OrderedProducts {
            customer_id,
            titles,
            display,
        },
        None,
    ))
}
