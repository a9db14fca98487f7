mod prints_json_contract;
mod prints_text_contract;
