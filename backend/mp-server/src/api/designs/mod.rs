pub mod design_dto;
pub mod design_list_response;
pub mod designs;
pub mod list_designs_query;
