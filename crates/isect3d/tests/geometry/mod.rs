mod aabb_overlap;
mod frustum_culling;
mod polyhedron_box_fuzz;
mod ray_triangle;
mod sphere_queries;
mod tri_box_fuzz;
