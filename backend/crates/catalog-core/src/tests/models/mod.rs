mod category;
mod product_status;
