pub mod p900_project_list;
