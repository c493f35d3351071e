pub mod neurotoxin;
