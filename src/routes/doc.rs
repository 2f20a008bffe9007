use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    admin::InlinePanel,
    domain::{
        catalog::InventoryStatus, customers::Membership, orders::PaymentStatus,
        tags::TaggableKind,
    },
    dto::{
        admin::{
            ClearInventoryRequest, CollectionAdminList, CustomerAdminList, OrderAdminList,
            ProductAdminList,
        },
        cart::{AddToCartRequest, CheckoutRequest, UpdateCartItemRequest},
        collections::{CollectionList, CollectionRequest},
        customers::{
            AddressList, CreateAddressRequest, CreateCustomerRequest, CustomerList,
            UpdateMembershipRequest,
        },
        orders::{OrderLineRequest, OrderList, PlaceOrderRequest, UpdatePaymentStatusRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        promotions::{CreatePromotionRequest, PromotionList},
        reviews::{CreateReviewRequest, ReviewList},
        tags::{CreateTagRequest, TagList, TagObjectRequest},
    },
    models::{
        AddressView, AdminPanels, CartItemView, CartView, ClearInventoryResult,
        CollectionAdminRow, CollectionView, CustomerAdminRow, CustomerView, OrderAdminRow,
        OrderItemView, OrderView, OrderWithItems, OrderedProducts, ProductAdminDetail,
        ProductAdminRow, ProductDetail, ProductView, PromotionView, ReviewView, TagView,
    },
    response::{ApiResponse, Meta},
    routes::{
        admin, cart, collections, customers, health, orders, params, products, promotions,
        reviews, tags,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        reviews::list_reviews,
        reviews::create_review,
        reviews::get_review,
        reviews::delete_review,
        promotions::list_promotions,
        promotions::create_promotion,
        promotions::attach_promotion,
        promotions::detach_promotion,
        collections::list_collections,
        collections::create_collection,
        collections::get_collection,
        collections::update_collection,
        collections::delete_collection,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::delete_customer,
        customers::list_addresses,
        customers::add_address,
        customers::list_customer_orders,
        customers::ordered_products,
        orders::place_order,
        orders::get_order,
        cart::create_cart,
        cart::get_cart,
        cart::delete_cart,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        cart::checkout,
        tags::list_tags,
        tags::create_tag,
        tags::tag_object,
        tags::list_object_tags,
        admin::list_products,
        admin::get_product_admin,
        admin::clear_inventory,
        admin::list_customers,
        admin::update_membership,
        admin::list_collections,
        admin::list_orders,
        admin::get_order_admin,
        admin::update_payment_status
    ),
    components(
        schemas(
            InventoryStatus,
            Membership,
            PaymentStatus,
            TaggableKind,
            InlinePanel,
            ProductView,
            ProductDetail,
            CollectionView,
            PromotionView,
            CustomerView,
            AddressView,
            OrderView,
            OrderItemView,
            OrderWithItems,
            CartItemView,
            CartView,
            ReviewView,
            TagView,
            OrderedProducts,
            ProductAdminRow,
            AdminPanels,
            ProductAdminDetail,
            CustomerAdminRow,
            CollectionAdminRow,
            OrderAdminRow,
            ClearInventoryResult,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CollectionRequest,
            CollectionList,
            CreatePromotionRequest,
            PromotionList,
            CreateCustomerRequest,
            CreateAddressRequest,
            UpdateMembershipRequest,
            CustomerList,
            AddressList,
            OrderLineRequest,
            PlaceOrderRequest,
            UpdatePaymentStatusRequest,
            OrderList,
            AddToCartRequest,
            UpdateCartItemRequest,
            CheckoutRequest,
            CreateReviewRequest,
            ReviewList,
            CreateTagRequest,
            TagObjectRequest,
            TagList,
            ClearInventoryRequest,
            ProductAdminList,
            CustomerAdminList,
            CollectionAdminList,
            OrderAdminList,
            params::Pagination,
            params::SortOrder,
            params::ProductSortBy,
            params::ProductQuery,
            params::ListQuery,
            params::InventoryFilter,
            params::LastUpdatedFilter,
            params::AdminProductQuery,
            Meta,
            ApiResponse<ProductView>,
            ApiResponse<ProductList>,
            ApiResponse<CollectionList>,
            ApiResponse<OrderWithItems>,
            ApiResponse<ProductAdminList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog product endpoints"),
        (name = "Collections", description = "Collection endpoints"),
        (name = "Promotions", description = "Promotion endpoints"),
        (name = "Reviews", description = "Product review endpoints"),
        (name = "Customers", description = "Customer and address endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Tags", description = "Tag endpoints"),
        (name = "Admin", description = "Operator listings and bulk actions"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
